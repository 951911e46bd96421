pub mod hot_contents;
pub mod search;
pub mod tool_router;

#[cfg(test)]
pub(crate) mod test_support;
