mod configuration;
mod image;
mod input;
