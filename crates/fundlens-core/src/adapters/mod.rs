mod blackrock;

pub use blackrock::BlackrockAdapter;
