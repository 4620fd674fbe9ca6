// Pipelines that drive the scorer over more than one message.

pub mod batch;
