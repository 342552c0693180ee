pub(crate) mod health_check_controller;
pub(crate) mod home_controller;
pub(crate) mod oauth_controller;
pub(crate) mod report_card_controller;
