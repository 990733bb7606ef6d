pub mod customer;
pub mod response;
