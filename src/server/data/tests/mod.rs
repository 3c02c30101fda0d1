mod airplane;

use hangar_test_utils::prelude::*;
