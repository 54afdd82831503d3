#[cfg(test)]
mod writer;
