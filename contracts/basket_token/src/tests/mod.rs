mod guard;
mod token;
