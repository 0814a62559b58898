pub mod avatar;
pub mod contribution;
pub mod layout;
pub mod members;
pub mod order_form;
pub mod sign_in;
pub mod tier_card;
