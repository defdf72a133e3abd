pub mod contact;
pub mod site;
