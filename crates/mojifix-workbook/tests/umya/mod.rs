mod repair_file;
mod traversal;
