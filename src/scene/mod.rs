pub(crate) mod city;
pub(crate) mod fullscreen;
pub(crate) mod glass;
pub(crate) mod header;
pub(crate) mod hover;
pub(crate) mod perspective;
pub(crate) mod progress;
pub(crate) mod video;
