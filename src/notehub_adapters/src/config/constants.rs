pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const CLIENT_ORIGIN_ENV_VAR: &str = "CLIENT_ORIGIN";
    pub const EMAIL_ENABLED_ENV_VAR: &str = "EMAIL_ENABLED";
    pub const RESEND_API_KEY_ENV_VAR: &str = "RESEND_API_KEY";
    pub const RESEND_FROM_ENV_VAR: &str = "RESEND_FROM";
    pub const SMTP_HOST_ENV_VAR: &str = "SMTP_HOST";
    pub const SMTP_PORT_ENV_VAR: &str = "SMTP_PORT";
    pub const SMTP_SECURE_ENV_VAR: &str = "SMTP_SECURE";
    pub const SMTP_USER_ENV_VAR: &str = "SMTP_USER";
    pub const SMTP_PASS_ENV_VAR: &str = "SMTP_PASS";
    pub const ADMIN_EMAIL_ENV_VAR: &str = "ADMIN_EMAIL";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:5000";

    pub mod email_client {
        use std::time::Duration;

        pub const RESEND_BASE_URL: &str = "https://api.resend.com";
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";

    pub mod email_client {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}
