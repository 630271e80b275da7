pub mod sample_send;
