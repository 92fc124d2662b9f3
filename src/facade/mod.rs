pub mod crud;

pub use crud::CrudFacade;
