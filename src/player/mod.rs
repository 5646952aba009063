pub mod decoder;
pub mod gst_decoder;
