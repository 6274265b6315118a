pub mod deck;
pub mod question;
