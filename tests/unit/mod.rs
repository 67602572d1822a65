mod common;
mod end_to_end;
mod visibility;
