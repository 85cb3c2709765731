pub mod registry_page;
