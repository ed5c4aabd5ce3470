pub mod esign;
pub mod health;
pub mod offers;
