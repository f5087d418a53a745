mod accept_invite;
mod create_invite;
mod lifecycle;
