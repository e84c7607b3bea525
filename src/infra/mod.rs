pub mod catalog_source;
