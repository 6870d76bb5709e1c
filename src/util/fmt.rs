use std::fmt::{self, Debug, Formatter};

/// Formats the items of a cloneable iterator as a debug list, so that collections can show their
/// contents as a single field of a `debug_struct`.
pub(crate) struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}

/// Dumps a sequence to stdout as `[a, b, c]`, delegating the rendering of each element to
/// `print_element`. An empty sequence prints `[]`.
pub(crate) fn print_elements<'a, T, I, F>(items: I, mut print_element: F)
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(&T),
{
    let mut items = items.into_iter().peekable();

    print!("[");
    while let Some(item) = items.next() {
        print_element(item);
        if items.peek().is_some() {
            print!(", ");
        }
    }
    println!("]");
}
