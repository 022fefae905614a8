pub mod admin;
pub mod city;
pub mod contact;
pub mod ordering;
pub mod review;
pub mod tour;
