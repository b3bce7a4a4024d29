mod classify;
mod fakes;
