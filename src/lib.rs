pub mod configuration;

pub mod function {
    pub mod realfunction;
    pub mod functiontable;
}

pub mod integration {
    pub mod integrationerror;
    pub mod riemannsum;
    pub mod sumtype;
    pub mod integrator;
    pub mod integratormanager;
}

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod numberformat;
}

pub mod shell {
    pub mod command;
    pub mod shell;
}
