pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod section_header;
pub mod skills;
pub mod social;
