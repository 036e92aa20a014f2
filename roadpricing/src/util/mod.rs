pub mod fs_utils;
