pub mod admin_login;
pub mod admin_panel;
pub mod client_reviews;
pub mod review_modal;
pub mod star_rating;
