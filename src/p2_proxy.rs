// Pattern 2: Structural Patterns - Proxy (virtual proxy)
// Stands in for an expensive object and creates it only when first used.
// The real image "loads from disk" at construction time; the proxy defers
// that until the first display and never repeats it.

use std::cell::{Cell, OnceCell};

// ============================================================================
// Example: Virtual Proxy with Lazy Initialization
// ============================================================================

trait Image {
    fn display(&self) -> String;
}

struct RealImage {
    file_name: String,
}

impl RealImage {
    fn new(file_name: impl Into<String>) -> Self {
        let image = Self {
            file_name: file_name.into(),
        };
        println!("{}", image.load_from_disk());
        image
    }

    fn load_from_disk(&self) -> String {
        format!("Loading image from disk: {}", self.file_name)
    }
}

impl Image for RealImage {
    fn display(&self) -> String {
        format!("Displaying image: {}", self.file_name)
    }
}

struct ImageProxy {
    file_name: String,
    // Lazily filled on first display; OnceCell keeps display() &self.
    real_image: OnceCell<RealImage>,
}

impl ImageProxy {
    fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            real_image: OnceCell::new(),
        }
    }

    #[allow(dead_code)]
    fn is_loaded(&self) -> bool {
        self.real_image.get().is_some()
    }
}

impl Image for ImageProxy {
    fn display(&self) -> String {
        let real = self
            .real_image
            .get_or_init(|| RealImage::new(self.file_name.clone()));
        real.display()
    }
}

fn proxy_example() {
    let image: Box<dyn Image> = Box::new(ImageProxy::new("high_resolution_image.jpg"));

    println!("First display:");
    println!("{}", image.display());

    // Second display reuses the already-loaded image.
    println!("\nSecond display:");
    println!("{}", image.display());
}

// ============================================================================
// Example: Counting Proxy
// ============================================================================

// The same interface can hide bookkeeping instead of laziness.

struct CountingImage<T> {
    inner: T,
    displays: Cell<u32>,
}

impl<T: Image> CountingImage<T> {
    fn new(inner: T) -> Self {
        Self {
            inner,
            displays: Cell::new(0),
        }
    }

    fn display_count(&self) -> u32 {
        self.displays.get()
    }
}

impl<T: Image> Image for CountingImage<T> {
    fn display(&self) -> String {
        self.displays.set(self.displays.get() + 1);
        self.inner.display()
    }
}

fn counting_proxy_example() {
    let counted = CountingImage::new(ImageProxy::new("thumbnail.png"));
    counted.display();
    counted.display();
    println!("Image displayed {} times", counted.display_count());
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_does_not_load_up_front() {
        let proxy = ImageProxy::new("photo.jpg");
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn test_first_display_loads_once() {
        let proxy = ImageProxy::new("photo.jpg");

        assert_eq!(proxy.display(), "Displaying image: photo.jpg");
        assert!(proxy.is_loaded());

        // Same backing instance on the second call.
        let first = proxy.real_image.get().unwrap() as *const RealImage;
        proxy.display();
        let second = proxy.real_image.get().unwrap() as *const RealImage;
        assert_eq!(first, second);
    }

    #[test]
    fn test_counting_proxy_tracks_displays() {
        let counted = CountingImage::new(ImageProxy::new("a.png"));
        assert_eq!(counted.display_count(), 0);

        counted.display();
        counted.display();
        counted.display();
        assert_eq!(counted.display_count(), 3);
    }
}

fn main() {
    println!("=== Proxy Pattern (Virtual Proxy) ===");
    proxy_example();
    println!();

    println!("=== Proxy Pattern (Counting Proxy) ===");
    counting_proxy_example();
}
