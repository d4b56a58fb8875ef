pub mod json_detection_reader;
pub mod json_group_writer;
