mod auth;
mod child;
mod family;
mod invite;
mod me;
