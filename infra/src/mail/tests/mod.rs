//! Unit tests for the mail module

mod mock_mail_tests;
