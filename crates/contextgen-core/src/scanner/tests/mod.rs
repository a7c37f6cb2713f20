mod tests_file_kind;
