pub mod default_transfer_syntax_arg;
