pub mod admin;
pub mod availability;
pub mod city;
pub mod contact;
pub mod review;
pub mod tour;
