pub mod bootstrap;
pub mod catalog;
pub mod controllers;
pub mod middleware;
pub mod models;
pub mod requests;
pub mod routes;
