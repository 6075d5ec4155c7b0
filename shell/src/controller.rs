// Original: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I> {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait TryIntake<I> {
    type To;
    type Error;
    fn emit(&self, input: I) -> Result<Self::To, Self::Error>;
}

pub trait Exhaust<I> {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    pub fn intake<I>(self, input: I) -> Transformed<P, T::To>
    where
        T: Intake<I>,
    {
        Transformed {
            transformed: self.transformer.emit(input),
            presenter: self.presenter,
        }
    }

    pub fn try_intake<I>(self, input: I) -> Result<Transformed<P, T::To>, T::Error>
    where
        T: TryIntake<I>,
    {
        Ok(Transformed {
            transformed: self.transformer.emit(input)?,
            presenter: self.presenter,
        })
    }

    /// Runs a use case that takes no input.
    pub fn bypass<F, O, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce() -> Result<O, E>,
        P: Exhaust<O>,
    {
        Ok(self.presenter.emit(f()?))
    }
}

pub struct Transformed<P, D> {
    transformed: D,
    presenter: P,
}

impl<P, D> Transformed<P, D> {
    pub fn handle<F, O, E>(self, f: F) -> Result<P::To, E>
    where
        F: FnOnce(D) -> Result<O, E>,
        P: Exhaust<O>,
    {
        Ok(self.presenter.emit(f(self.transformed)?))
    }
}
