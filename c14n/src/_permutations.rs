/// Call `f` on each permutation of `values` (in place, using Heap's algorithm),
/// stopping at the first error.
///
/// Nothing is called if `values` is empty.
pub fn try_for_each_permutation_of<T, E, F>(values: &mut [T], mut f: F) -> Result<(), E>
where
    F: FnMut(&[T]) -> Result<(), E>,
{
    if values.is_empty() {
        return Ok(());
    }
    let size = values.len();
    heap_permutations(values, &mut f, size)
}

// https://en.wikipedia.org/wiki/Heap%27s_algorithm
fn heap_permutations<T, E, F>(values: &mut [T], f: &mut F, size: usize) -> Result<(), E>
where
    F: FnMut(&[T]) -> Result<(), E>,
{
    if size == 1 {
        return f(values);
    }
    for i in 0..size {
        heap_permutations(values, f, size - 1)?;
        if size % 2 == 1 {
            values.swap(0, size - 1);
        } else {
            values.swap(i, size - 1);
        }
    }
    Ok(())
}
