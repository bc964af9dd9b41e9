pub mod availability_picker;
pub mod tag_editor;
