pub mod a001_sector;
pub mod a002_dining_table;
pub mod a003_waiter;
pub mod a004_section;
pub mod a005_product;
pub mod a006_payment_method;
pub mod a007_client;
pub mod a008_reservation;
pub mod a009_order;
pub mod a010_invoice;
pub mod a011_payment;
