pub mod capture_command;
pub mod dictionary_command;
pub mod inspect_command;
pub mod reconstruct_command;
