mod gate;
mod validate_token;
