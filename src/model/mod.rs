/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Credentials and token models
pub mod auth;
/// Business models
pub mod business;
/// Authenticated HTTP transport
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
