use driver::module::LibraryModule;
use kernel::KernelError;
use vodca::References;

#[derive(References)]
pub struct Handler {
    library: LibraryModule,
}

impl Handler {
    pub fn init() -> error_stack::Result<Self, KernelError> {
        let library = LibraryModule::init()?;
        Ok(Self::new(library))
    }

    pub fn new(library: LibraryModule) -> Self {
        Self { library }
    }
}
