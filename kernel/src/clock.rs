use time::Date;

pub trait Clock: 'static + Sync + Send {
    fn today(&self) -> Date;
}

pub trait DependOnClock: 'static + Sync + Send {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
