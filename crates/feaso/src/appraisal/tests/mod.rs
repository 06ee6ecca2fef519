mod common;
mod rescode;
mod routing;
