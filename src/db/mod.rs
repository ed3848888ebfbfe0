pub mod dbitems;
