mod tests_content_cache;
