pub mod chat_interface;
pub mod dog_form;
pub mod forms;
pub mod header;
pub mod id_card;
pub mod welcome;
