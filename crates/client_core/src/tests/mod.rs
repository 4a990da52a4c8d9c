mod captions_tests;
mod carousel_tests;
mod share_tests;
