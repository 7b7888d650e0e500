pub mod noise_source;
