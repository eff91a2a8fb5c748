// Pattern 3: Behavioral Patterns - Iterator
// Sequential access to a library's books without exposing how they are
// stored. In Rust the pattern is the `Iterator` trait itself; the explicit
// iterator object below is what the classic hasNext/next pair becomes.

// ============================================================================
// Example: Custom Iterator over a Collection
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Book {
    title: String,
    author: String,
}

impl Book {
    fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    fn describe(&self) -> String {
        format!("Title: {}, Author: {}", self.title, self.author)
    }
}

struct Library {
    books: Vec<Book>,
}

impl Library {
    fn new() -> Self {
        Self { books: Vec::new() }
    }

    fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) {
        self.books.push(Book::new(title, author));
    }

    fn iter(&self) -> BookIterator<'_> {
        BookIterator {
            books: &self.books,
            index: 0,
        }
    }
}

// The explicit iterator object: borrows the collection, tracks a cursor.
struct BookIterator<'a> {
    books: &'a [Book],
    index: usize,
}

impl<'a> Iterator for BookIterator<'a> {
    type Item = &'a Book;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.books.get(self.index)?;
        self.index += 1;
        Some(book)
    }
}

fn iterator_example() {
    let mut library = Library::new();
    library.add_book("The Catcher in the Rye", "J.D. Salinger");
    library.add_book("To Kill a Mockingbird", "Harper Lee");
    library.add_book("1984", "George Orwell");

    println!("Books in the library:");
    for book in library.iter() {
        println!("{}", book.describe());
    }
}

// ============================================================================
// Example: IntoIterator - Borrowed and Owned Traversal
// ============================================================================

impl<'a> IntoIterator for &'a Library {
    type Item = &'a Book;
    type IntoIter = BookIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Library {
    type Item = Book;
    type IntoIter = std::vec::IntoIter<Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_iter()
    }
}

fn into_iterator_example() {
    let mut library = Library::new();
    library.add_book("Dune", "Frank Herbert");
    library.add_book("Hyperion", "Dan Simmons");

    println!("Borrowed iteration:");
    for book in &library {
        println!("  {}", book.describe());
    }

    println!("Owned iteration:");
    for book in library {
        println!("  {}", book.describe());
    }
    // library moved
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_library() -> Library {
        let mut library = Library::new();
        library.add_book("The Catcher in the Rye", "J.D. Salinger");
        library.add_book("To Kill a Mockingbird", "Harper Lee");
        library.add_book("1984", "George Orwell");
        library
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let library = sample_library();
        let titles: Vec<&str> = library.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["The Catcher in the Rye", "To Kill a Mockingbird", "1984"]
        );
    }

    #[test]
    fn test_iterator_exhausts() {
        let library = sample_library();
        let mut iter = library.iter();
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        // Stays exhausted.
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_empty_library() {
        let library = Library::new();
        assert!(library.iter().next().is_none());
    }

    #[test]
    fn test_borrowed_iteration_leaves_library_usable() {
        let library = sample_library();
        let count = (&library).into_iter().count();
        assert_eq!(count, 3);
        assert_eq!(library.books.len(), 3);
    }

    #[test]
    fn test_owned_iteration() {
        let library = sample_library();
        let books: Vec<Book> = library.into_iter().collect();
        assert_eq!(books.len(), 3);
        assert_eq!(books[2], Book::new("1984", "George Orwell"));
    }

    #[test]
    fn test_describe() {
        let book = Book::new("1984", "George Orwell");
        assert_eq!(book.describe(), "Title: 1984, Author: George Orwell");
    }
}

fn main() {
    println!("=== Iterator Pattern (Explicit Iterator) ===");
    iterator_example();
    println!();

    println!("=== Iterator Pattern (IntoIterator) ===");
    into_iterator_example();
}
