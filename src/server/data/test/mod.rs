mod business;
mod review;
