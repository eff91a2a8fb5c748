// Design Patterns Catalog
// Each pattern is an independent runnable program; there is no shared runtime.

pub mod catalog {
    //! # Design Patterns Catalog
    //!
    //! Short, self-contained programs demonstrating the classic
    //! object-oriented design patterns, one binary per pattern:
    //!
    //! ## Pattern 1: Creational Patterns
    //! - Singleton (`p1_singleton`) - init-once `OnceLock` instance,
    //!   dependency injection as the preferred form
    //! - Builder (`p1_builder`) - fluent builder, director, runtime validation
    //! - Factory Method (`p1_factory`) - trait-object and enum factories
    //! - Prototype (`p1_prototype`) - cloning through the interface
    //!
    //! ## Pattern 2: Structural Patterns
    //! - Facade (`p2_facade`) - one call over the home-theater subsystems
    //! - Adapter (`p2_adapter`) - mp4 through an audio-player interface
    //! - Proxy (`p2_proxy`) - image loaded lazily, exactly once
    //! - Decorator (`p2_decorator`) - coffee add-ons as single-owner wrappers
    //!
    //! ## Pattern 3: Behavioral Patterns
    //! - Observer (`p3_observer`) - weather station notifying displays
    //! - Strategy (`p3_strategy`) - interchangeable payment methods
    //! - State (`p3_state`) - a TCP connection whose behavior follows its
    //!   state; transitions are real, see the file header for the rationale
    //! - Iterator (`p3_iterator`) - a library traversed without exposing
    //!   its storage
    //!
    //! Run any example with:
    //! ```bash
    //! cargo run --bin p3_state
    //! ```
}
