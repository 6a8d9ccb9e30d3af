// src/stages/mod.rs
// links.txt -> pages/*.html -> decklists/*.txt -> card_matrix.csv
pub mod extract;
pub mod fetch;
pub mod matrix;
