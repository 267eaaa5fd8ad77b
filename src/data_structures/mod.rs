pub mod min_heap;
