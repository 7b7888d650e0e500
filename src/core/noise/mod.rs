pub mod open_simplex;
